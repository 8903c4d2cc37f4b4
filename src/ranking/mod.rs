//! Item ranking shared by every constructor and repair step.

mod efficiency;

pub use efficiency::rank_by_efficiency;
