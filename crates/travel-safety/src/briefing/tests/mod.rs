mod alerts;
mod common;
mod recommendations;
mod service;
