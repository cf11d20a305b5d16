// View-model builder - pure transformation of records into a dashboard
use crate::domain::classify::{booking_status_tag, priority_tag, ClassifyError};
use crate::domain::format::{format_currency, initials, FormatError};
use crate::domain::records::{Booking, FinancialSample, GuestRequest, Metrics, StaffTask};
use crate::domain::view_model::{
    BookingRow, DashboardViewModel, FinancialOverview, KpiTile, RequestFeedItem, SeriesLegend,
    StaffTaskRow,
};
use crate::infrastructure::config::WidgetsConfig;
use thiserror::Error;

/// First failure encountered while building a view model. The build is
/// all-or-nothing: a partial dashboard with missing badges is never returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewModelBuildError {
    #[error("booking for {guest:?}: {source}")]
    Booking {
        guest: String,
        #[source]
        source: ClassifyError,
    },
    #[error("staff task for {staff:?}: {source}")]
    StaffTask {
        staff: String,
        #[source]
        source: ClassifyError,
    },
    #[error("total expenditure: {source}")]
    TotalExpenditure {
        #[source]
        source: FormatError,
    },
}

/// Build the render-ready dashboard from the five input collections.
///
/// Pure and deterministic: no I/O, inputs are not mutated, and row order in
/// every output sequence matches the corresponding input exactly. KPI values
/// pass through from `metrics` unchanged; the tile and legend tables come
/// from the static widgets configuration.
pub fn build_view_model(
    title: &str,
    bookings: &[Booking],
    staff_tasks: &[StaffTask],
    financial_samples: &[FinancialSample],
    requests: &[GuestRequest],
    metrics: &Metrics,
    widgets: &WidgetsConfig,
) -> Result<DashboardViewModel, ViewModelBuildError> {
    let kpi_tiles = widgets
        .tiles
        .iter()
        .map(|tile| KpiTile {
            id: tile.id.clone(),
            label: tile.title.clone(),
            value: metrics.value(tile.metric),
            category: tile.accent,
        })
        .collect();

    let booking_rows = bookings
        .iter()
        .map(|booking| {
            let badge = booking_status_tag(&booking.status).map_err(|source| {
                ViewModelBuildError::Booking {
                    guest: booking.guest_name.clone(),
                    source,
                }
            })?;
            Ok(BookingRow {
                guest_name: booking.guest_name.clone(),
                room: booking.room.clone(),
                check_in: booking.check_in,
                check_out: booking.check_out,
                status: booking.status.clone(),
                badge,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let staff_task_rows = staff_tasks
        .iter()
        .map(|task| {
            let badge =
                priority_tag(&task.priority).map_err(|source| ViewModelBuildError::StaffTask {
                    staff: task.staff_name.clone(),
                    source,
                })?;
            Ok(StaffTaskRow {
                staff_name: task.staff_name.clone(),
                role: task.role.clone(),
                priority: task.priority.clone(),
                badge,
                description: task.description.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let legend = widgets
        .series
        .iter()
        .map(|series| SeriesLegend {
            field: series.field,
            name: series.name.clone(),
            color: series.color.clone(),
        })
        .collect();

    let total_expenditure = format_currency(metrics.total_expenditure)
        .map_err(|source| ViewModelBuildError::TotalExpenditure { source })?;

    let financial = FinancialOverview {
        series: financial_samples.to_vec(),
        legend,
        total_expenditure,
    };

    let request_items = requests
        .iter()
        .map(|request| RequestFeedItem {
            guest_name: request.guest_name.clone(),
            room: request.room.clone(),
            request: request.request.clone(),
            initials: initials(&request.guest_name),
        })
        .collect();

    Ok(DashboardViewModel {
        title: title.to_string(),
        kpi_tiles,
        booking_rows,
        staff_task_rows,
        staff_total: metrics.staff_count,
        financial,
        requests: request_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view_model::DisplayCategory;
    use crate::infrastructure::sample_data;

    fn build_sample() -> Result<DashboardViewModel, ViewModelBuildError> {
        let records = sample_data::seed().unwrap();
        build_view_model(
            "Grand Meridian Dashboard",
            &records.bookings,
            &records.staff_tasks,
            &records.financial_samples,
            &records.guest_requests,
            &records.metrics,
            &WidgetsConfig::default(),
        )
    }

    #[test]
    fn test_end_to_end_sample_dashboard() {
        let vm = build_sample().unwrap();

        let tile_ids: Vec<&str> = vm.kpi_tiles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            tile_ids,
            vec!["vacancy", "booked", "pending_checkout", "guests"]
        );
        let tile_values: Vec<u32> = vm.kpi_tiles.iter().map(|t| t.value).collect();
        assert_eq!(tile_values, vec![42, 128, 9, 276]);

        assert_eq!(vm.booking_rows.len(), 5);
        assert_eq!(vm.staff_task_rows.len(), 4);
        assert_eq!(vm.staff_total, 58);
        assert_eq!(vm.financial.series.len(), 7);
        assert_eq!(vm.financial.legend.len(), 3);
        assert_eq!(vm.financial.total_expenditure, "$82,450");
        assert_eq!(vm.requests.len(), 5);
        for item in &vm.requests {
            let len = item.initials.chars().count();
            assert!((1..=2).contains(&len), "initials {:?}", item.initials);
        }
    }

    #[test]
    fn test_badges_resolved_per_row() {
        let vm = build_sample().unwrap();

        let badges: Vec<DisplayCategory> = vm.booking_rows.iter().map(|r| r.badge).collect();
        assert_eq!(
            badges,
            vec![
                DisplayCategory::Positive,
                DisplayCategory::Informational,
                DisplayCategory::Positive,
                DisplayCategory::Neutral,
                DisplayCategory::Neutral,
            ]
        );

        let priorities: Vec<DisplayCategory> =
            vm.staff_task_rows.iter().map(|r| r.badge).collect();
        assert_eq!(
            priorities,
            vec![
                DisplayCategory::Critical,
                DisplayCategory::Warning,
                DisplayCategory::Default,
                DisplayCategory::Critical,
            ]
        );
    }

    #[test]
    fn test_row_order_matches_input_order() {
        let records = sample_data::seed().unwrap();
        let vm = build_sample().unwrap();

        let input_guests: Vec<&str> =
            records.bookings.iter().map(|b| b.guest_name.as_str()).collect();
        let output_guests: Vec<&str> =
            vm.booking_rows.iter().map(|r| r.guest_name.as_str()).collect();
        assert_eq!(input_guests, output_guests);

        let input_days: Vec<&str> = records
            .financial_samples
            .iter()
            .map(|s| s.day.as_str())
            .collect();
        let output_days: Vec<&str> =
            vm.financial.series.iter().map(|s| s.day.as_str()).collect();
        assert_eq!(input_days, output_days);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build_sample().unwrap();
        let second = build_sample().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_booking_status_fails_whole_build() {
        let mut records = sample_data::seed().unwrap();
        records.bookings[2].status = "Unknown".to_string();

        let err = build_view_model(
            "Grand Meridian Dashboard",
            &records.bookings,
            &records.staff_tasks,
            &records.financial_samples,
            &records.guest_requests,
            &records.metrics,
            &WidgetsConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ViewModelBuildError::Booking { ref guest, .. }
            if guest == &records.bookings[2].guest_name));
    }

    #[test]
    fn test_unknown_priority_fails_whole_build() {
        let mut records = sample_data::seed().unwrap();
        records.staff_tasks[0].priority = "Urgent".to_string();

        let err = build_view_model(
            "Grand Meridian Dashboard",
            &records.bookings,
            &records.staff_tasks,
            &records.financial_samples,
            &records.guest_requests,
            &records.metrics,
            &WidgetsConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ViewModelBuildError::StaffTask { .. }));
    }

    #[test]
    fn test_invalid_total_expenditure_fails_whole_build() {
        let mut records = sample_data::seed().unwrap();
        records.metrics.total_expenditure = f64::NAN;

        let err = build_view_model(
            "Grand Meridian Dashboard",
            &records.bookings,
            &records.staff_tasks,
            &records.financial_samples,
            &records.guest_requests,
            &records.metrics,
            &WidgetsConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ViewModelBuildError::TotalExpenditure { .. }));
    }

    #[test]
    fn test_empty_inputs_build_empty_sections() {
        let records = sample_data::seed().unwrap();
        let vm = build_view_model(
            "Grand Meridian Dashboard",
            &[],
            &[],
            &[],
            &[],
            &records.metrics,
            &WidgetsConfig::default(),
        )
        .unwrap();

        assert!(vm.booking_rows.is_empty());
        assert!(vm.staff_task_rows.is_empty());
        assert!(vm.financial.series.is_empty());
        assert!(vm.requests.is_empty());
        // Tiles and legend come from configuration, not the collections.
        assert_eq!(vm.kpi_tiles.len(), 4);
        assert_eq!(vm.financial.legend.len(), 3);
    }
}
