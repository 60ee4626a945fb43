use crate::analysis::{Aggregated, GenreFrequency, YearlyBoxOffice, YearlyRatings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCategory {
    Genres,
    BoxOffice,
    Ratings,
}

impl ChartCategory {
    pub fn dir_name(&self) -> &'static str {
        match self {
            ChartCategory::Genres => "genres-over-time",
            ChartCategory::BoxOffice => "box-office-over-time",
            ChartCategory::Ratings => "rating-over-time",
        }
    }
}

/// Everything a plotting tool needs to draw one actor's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub category: ChartCategory,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_max: Option<f64>,
    pub points: Vec<(String, String)>,
}

impl Chart {
    pub fn csv_titles(&self) -> Vec<&'static str> {
        vec![self.x_label, self.y_label]
    }
}

pub fn genres_chart(genres: &Aggregated<'_, GenreFrequency>) -> Chart {
    Chart {
        category: ChartCategory::Genres,
        title: format!(
            "{}'s movie genres over the years",
            genres.column.display_name()
        ),
        x_label: "Genre",
        y_label: "number of movies",
        y_max: None,
        points: genres
            .summary
            .iter()
            .map(|(genre, count)| (genre.to_string(), count.to_string()))
            .collect(),
    }
}

pub fn box_office_chart(box_office: &Aggregated<'_, YearlyBoxOffice>) -> Chart {
    // Leave a tenth of headroom above the best year.
    let y_max = box_office
        .summary
        .values()
        .max()
        .map(|highest| *highest as f64 * 1.1);

    Chart {
        category: ChartCategory::BoxOffice,
        title: format!(
            "{}'s box office collections over the years",
            box_office.column.display_name()
        ),
        x_label: "Year",
        y_label: "Money earned (USD)",
        y_max,
        points: box_office
            .summary
            .iter()
            .map(|(year, total)| (year.to_string(), total.to_string()))
            .collect(),
    }
}

pub fn ratings_chart(ratings: &Aggregated<'_, YearlyRatings>) -> Chart {
    Chart {
        category: ChartCategory::Ratings,
        title: format!(
            "{}'s Imdb ratings over the years",
            ratings.column.display_name()
        ),
        x_label: "Year",
        y_label: "IMDb rating (1-10)",
        y_max: None,
        points: ratings
            .summary
            .iter()
            .flat_map(|(year, values)| {
                values
                    .iter()
                    .map(move |rating| (year.to_string(), rating.to_string()))
            })
            .collect(),
    }
}
