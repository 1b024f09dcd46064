pub mod sensor_repo;

pub use sensor_repo::SensorRepo;
