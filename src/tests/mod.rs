mod chordal_tests;
mod triangulation_tests;
mod utils;
