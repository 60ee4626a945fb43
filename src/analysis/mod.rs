pub mod box_office;
pub mod genres;
pub mod iterator;
pub mod numeric;
pub mod ratings;
pub mod summary;
pub mod top_earner;
pub mod year_range;

pub use box_office::{box_office_over_time, YearlyBoxOffice};
pub use genres::{genres_over_career, GenreFrequency};
pub use iterator::{aggregate_column, do_for_all, Aggregated, ErrorPolicy, RunReport};
pub use numeric::extract_number;
pub use ratings::{movie_ratings_over_time, YearlyRatings};
pub use summary::Summary;
pub use top_earner::{highest_paid_actor, total_box_office};
