//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Reference checks**: Rejecting payloads that name pet types, owners, pets or
//!   specialties that do not exist
//! - **Ownership**: Resolving nested owner/pet routes to the pets the owner actually has
//! - **Credentials**: Hashing new passwords and verifying HTTP Basic credentials
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod clinic;
pub mod user;
