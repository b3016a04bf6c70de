pub mod layout;
pub mod run;
