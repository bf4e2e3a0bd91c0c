pub mod cli;
pub mod model;
pub mod parser;
pub mod storage;
pub mod tasklist;
pub mod ui;
