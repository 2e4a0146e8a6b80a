use reqwest::Method;

use super::client::ApiClient;
use super::endpoints;
use crate::error::ApiError;
use crate::model::stats::{
    ChartPoint, Dashboard, GenderSlice, StatTile, StatsPeriod, TopAttendant, WeeklyPoint,
    WeeklyView,
};

/// How many top attendants the dashboard shows.
pub const TOP_ATTENDANTS: usize = 5;

impl ApiClient {
    pub async fn stat_tiles(&self) -> Result<Vec<StatTile>, ApiError> {
        Self::send_json(self.authed(Method::GET, endpoints::GET_STATS)?).await
    }

    pub async fn attendance_stats(&self, period: StatsPeriod) -> Result<Vec<ChartPoint>, ApiError> {
        let path = format!("{}/{}", endpoints::GET_ATTENDANCE_STATS, period.as_ref());
        Self::send_json(self.authed(Method::GET, &path)?).await
    }

    pub async fn gender_stats(&self) -> Result<Vec<GenderSlice>, ApiError> {
        Self::send_json(self.authed(Method::GET, endpoints::GET_GENDER_STATS)?).await
    }

    pub async fn top_attendants(&self) -> Result<Vec<TopAttendant>, ApiError> {
        let mut all: Vec<TopAttendant> =
            Self::send_json(self.authed(Method::GET, endpoints::GET_TOP_ATTENDANTS)?).await?;
        all.truncate(TOP_ATTENDANTS);
        Ok(all)
    }

    pub async fn weekly_attendance(&self, view: WeeklyView) -> Result<Vec<WeeklyPoint>, ApiError> {
        let path = format!("{}/{}", endpoints::GET_WEEKLY_ATTENDANCE, view.as_ref());
        Self::send_json(self.authed(Method::GET, &path)?).await
    }

    /// Everything the dashboard screen shows, fetched concurrently.
    pub async fn dashboard(&self, period: StatsPeriod) -> Result<Dashboard, ApiError> {
        let (tiles, attendance, weekly_absent, genders, top_attendants) = futures::try_join!(
            self.stat_tiles(),
            self.attendance_stats(period),
            self.weekly_attendance(WeeklyView::Absent),
            self.gender_stats(),
            self.top_attendants()
        )?;

        Ok(Dashboard {
            tiles,
            attendance,
            weekly_absent,
            genders,
            top_attendants,
        })
    }
}
