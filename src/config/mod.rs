mod database;
mod hashing;
mod jwt;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, PgTx};
pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig};
pub use self::myconfig::Config;
