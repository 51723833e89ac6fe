pub mod chiang_rai;
pub mod department;
pub mod news;
pub mod program;
pub mod staff;
pub mod user;
