pub mod trivia_source;
