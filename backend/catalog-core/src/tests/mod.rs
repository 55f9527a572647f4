mod command;
mod credentials;
mod fields;
