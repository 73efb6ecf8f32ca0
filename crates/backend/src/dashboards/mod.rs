pub mod d001_admin_summary;
