//! Plugin identity and host integration
//!
//! # Modules
//!
//! - [`container`]: Host plugin container and manager traits, JSON descriptors
//! - [`meta`]: `PluginMeta`, the immutable identity and version bundle
//! - [`lifecycle`]: `FoundationsPlugin` and the host lifecycle hooks
//! - [`error`]: Error types for metadata and descriptor loading

pub mod container;
pub mod error;
pub mod lifecycle;
pub mod meta;

pub use container::{
    PluginContainer, PluginDependency, PluginDescriptor, PluginManager, StaticPluginManager,
};
pub use error::{DescriptorError, MetaError};
pub use lifecycle::{FoundationsPlugin, GameEvent, GameState, LifecycleListener, dispatch};
pub use meta::{BuildInfo, PluginMeta};
