/// Set of functions used to assure the correctness of solutions.
pub mod assertions;
