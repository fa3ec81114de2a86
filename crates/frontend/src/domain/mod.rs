pub mod a001_project;
pub mod a002_career;
pub mod a003_tech_stack;
