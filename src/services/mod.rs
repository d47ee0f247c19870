pub mod actuator;
pub mod greeting;
pub mod hello;
