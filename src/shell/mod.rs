// Composition root for the comment board.
//
// - Read configuration from the environment.
// - Build the in-memory store and wire it into the use case handlers.
// - Expose the HTTP routes and the GraphQL schema over shared state.

pub mod config;
pub mod graphql;
pub mod http;
pub mod rejection;
pub mod state;
