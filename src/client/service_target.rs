use crate::ModelIden;
use crate::resolver::{AuthData, Endpoint};

/// Everything a single service call is addressed with: the endpoint, the
/// per-call credential, and the model identifier. Assembled fresh for each
/// invocation; never stored.
#[derive(Debug, Clone)]
pub struct ServiceTarget {
	pub endpoint: Endpoint,
	pub auth: AuthData,
	pub model: ModelIden,
}
