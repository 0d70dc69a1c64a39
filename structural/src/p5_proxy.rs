// Pattern 5: Proxy
// The proxy implements the same trait as the real database but delays
// the expensive connection until the first query. Callers hold
// `dyn Database` and never learn whether a connection exists yet.

trait Database {
    fn query(&mut self, sql: &str) -> String;
}

struct RealDatabase;

impl RealDatabase {
    fn connect() -> Self {
        // The expensive part the proxy is shielding callers from.
        println!("Connecting to the database...");
        RealDatabase
    }
}

impl Database for RealDatabase {
    fn query(&mut self, sql: &str) -> String {
        format!("Executing query: {}", sql)
    }
}

#[derive(Default)]
struct DatabaseProxy {
    real: Option<RealDatabase>,
    connects: u32,
}

impl DatabaseProxy {
    fn is_connected(&self) -> bool {
        self.real.is_some()
    }

    fn connects(&self) -> u32 {
        self.connects
    }
}

impl Database for DatabaseProxy {
    fn query(&mut self, sql: &str) -> String {
        let connects = &mut self.connects;
        let real = self.real.get_or_insert_with(|| {
            *connects += 1;
            RealDatabase::connect()
        });
        real.query(sql)
    }
}

fn main() {
    println!("=== Proxy Pattern Demo ===\n");

    let mut db = DatabaseProxy::default();
    println!("Proxy created; connected: {}", db.is_connected());

    // The first query triggers the actual connection.
    println!("{}", db.query("SELECT * FROM users"));

    // Subsequent queries reuse it.
    println!("{}", db.query("SELECT * FROM orders"));
    println!("\nConnections opened: {}", db.connects());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_starts_disconnected() {
        let proxy = DatabaseProxy::default();
        assert!(!proxy.is_connected());
        assert_eq!(proxy.connects(), 0);
    }

    #[test]
    fn test_first_query_opens_the_connection() {
        let mut proxy = DatabaseProxy::default();
        let result = proxy.query("SELECT 1");

        assert_eq!(result, "Executing query: SELECT 1");
        assert!(proxy.is_connected());
        assert_eq!(proxy.connects(), 1);
    }

    #[test]
    fn test_later_queries_reuse_the_connection() {
        let mut proxy = DatabaseProxy::default();
        proxy.query("SELECT 1");
        proxy.query("SELECT 2");
        proxy.query("SELECT 3");

        assert_eq!(proxy.connects(), 1);
    }

    #[test]
    fn test_proxy_and_real_database_answer_alike() {
        let mut real = RealDatabase;
        let mut proxy = DatabaseProxy::default();

        let sql = "SELECT * FROM users";
        assert_eq!(real.query(sql), proxy.query(sql));
    }
}
