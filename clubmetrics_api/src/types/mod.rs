mod company;
pub use self::company::{AnnualSummary, Company, CompanyData, CompanyId, Employee};

mod performance;
pub use self::performance::{PerformanceMap, PerformancePoint};

mod transaction;
pub use self::transaction::Transaction;
