//! Domain Layer
//!
//! The core of Estima - pure estimation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Clamped/coerced input types (Dial, Weight, QualityTier)
//! - `entities/` - Session data (criterion catalog, selection, commercial
//!   parameters, project payload)
//! - `services/` - The estimation pipelines as pure functions
//! - `ports/` - Interface to the external project repository
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network or a data store
//! 2. **Pure Functions** - Services are stateless, total, and idempotent
//! 3. **Ports & Adapters** - The single external call goes through a trait

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
