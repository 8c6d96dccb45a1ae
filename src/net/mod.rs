//! Network boundary: the authentication collaborator, its wire types and
//! its failure taxonomy.

pub mod auth_service;
pub mod error;
pub mod types;
