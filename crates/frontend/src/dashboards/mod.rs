pub mod d001_admin_summary;

pub use d001_admin_summary::AdminDashboard;
