pub mod skills;
pub mod tech_grid;
