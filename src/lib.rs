#![cfg_attr(not(test), no_std)]

//! ppm_rover - PPM radio-control receiver decoding and failsafe control loop
//!
//! This library decodes a pulse-position-modulated (PPM) RC signal into
//! normalized channel values, maps them to steering and throttle commands
//! under a mode selector channel, and enforces a dead-man's-switch failsafe
//! when valid input stops arriving.

// Platform abstraction layer (pulse capture, PWM, GPIO, timer)
pub mod platform;

// Reusable building blocks (PPM decoder, actuators, status indicator)
pub mod libraries;

// Core infrastructure (logging)
pub mod core;

// Rover vehicle logic (control policy, failsafe watchdog, control loop)
pub mod rover;
