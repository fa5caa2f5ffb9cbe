// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token)

pub mod protected; // /user/*, /bookmark/*
pub mod public; // /auth/*, /health
