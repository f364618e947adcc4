//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by the public API, its stable code table, and
//! a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while computing a minimum spanning tree or forest.
///
/// Every variant describes malformed input detected before the disjoint-set
/// forest is touched, except [`MstError::CostOverflow`], which is raised when
/// the running total cost no longer fits the weight type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge referenced a vertex outside `0..vertex_count`.
    #[error(
        "edge {edge_index} references vertex {vertex}, but vertex_count is {vertex_count}"
    )]
    InvalidVertex {
        /// The out-of-range vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
        /// Position of the offending edge in the caller's edge list.
        edge_index: usize,
    },
    /// An edge carried a weight that cannot be ordered meaningfully (NaN or
    /// infinite).
    #[error("edge {edge_index} ({left} -- {right}) has a non-finite weight")]
    NonFiniteWeight {
        /// Source endpoint as provided.
        left: usize,
        /// Target endpoint as provided.
        right: usize,
        /// Position of the offending edge in the caller's edge list.
        edge_index: usize,
    },
    /// Summing the accepted edge weights overflowed the weight type.
    #[error("total cost overflowed after {accepted} accepted edges")]
    CostOverflow {
        /// Number of edges accepted when the overflow occurred.
        accepted: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "MST_INVALID_VERTEX",
        /// An edge carried a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// The total cost overflowed the weight type.
        CostOverflow => CostOverflow { .. } => "MST_COST_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
