mod concentration_test;
pub use concentration_test::ConcentrationTest;

mod recent;
pub use recent::RecentConcentration;
