pub mod crewmates_command;
