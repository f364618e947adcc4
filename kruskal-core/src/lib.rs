//! Kruskal core library.
//!
//! Computes minimum spanning trees (and spanning forests of disconnected
//! graphs) by sorting edges by weight and greedily accepting every edge that
//! joins two components of a disjoint-set forest.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod mst;
mod weight;


pub use crate::{
    disjoint_set::{DisjointSetForest, Subset},
    edge::{Edge, sort_by_weight, sorted_by_weight},
    error::{MstError, MstErrorCode, Result},
    mst::{BuilderState, MstBuilder, SpanningForest, Step, Termination, compute_mst},
    weight::Weight,
};
