pub mod aggregate_desired_state;
pub mod reconcile_rewrites;

pub use aggregate_desired_state::AggregateDesiredStateUseCase;
pub use reconcile_rewrites::ReconcileRewritesUseCase;
