pub mod actuator;
pub mod greeting;
