pub mod states;
pub mod params;
pub mod phases;
pub mod kinematics;
pub mod summary;
pub mod scenario;
