// Core module - Game model and generation engine
pub mod game;
pub mod generator;
