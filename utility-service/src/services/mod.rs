pub mod environment;
pub mod ip_lookup;
pub mod math;
pub mod metrics;

pub use environment::{get_env_var, EnvError};
pub use ip_lookup::{IpLookup, IpLookupError, IpifyClient};
pub use math::{increment, MathError};
pub use self::metrics::{get_metrics, init_metrics, record_ip_lookup};
