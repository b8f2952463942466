//! PostgreSQL-backed `BookingRepository` implementation using Diesel ORM.
//!
//! Every read joins the items table so a booking always carries the item
//! reference the domain needs for ownership checks and views. Listing
//! queries share one boxed base query; each port method contributes its
//! filter and the page is applied once.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::helper_types::{AsSelect, IntoBoxed, Select};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageBounds;

use crate::domain::booking::{BookedItem, Booking, BookingStatus, NewBooking};
use crate::domain::ports::{BookingRepository, RepoError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookingRow, ItemRefRow, NewBookingRow};
use super::pool::DbPool;
use super::schema::{bookings, items};

/// Diesel-backed implementation of the booking repository port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type BookingRecord = (BookingRow, ItemRefRow);
type JoinedBookings = diesel::helper_types::InnerJoin<bookings::table, items::table>;
type BoxedBookingQuery = IntoBoxed<'static, Select<JoinedBookings, AsSelect<BookingRecord, Pg>>, Pg>;

fn joined_bookings() -> BoxedBookingQuery {
    bookings::table
        .inner_join(items::table)
        .select(BookingRecord::as_select())
        .into_boxed()
}

fn record_to_booking((row, item): BookingRecord) -> Result<Booking, RepoError> {
    let status =
        BookingStatus::parse(&row.status).map_err(|err| RepoError::query(err.to_string()))?;
    Ok(Booking {
        id: row.id,
        start: row.start_date,
        end: row.end_date,
        status,
        booker_id: row.booker_id,
        item: BookedItem {
            id: item.id,
            name: item.name,
            owner_id: item.owner_id,
        },
    })
}

impl DieselBookingRepository {
    /// Run a listing query sorted newest start first with the shared page
    /// convention applied.
    async fn load_page(
        &self,
        query: BoxedBookingQuery,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let records = query
            .order(bookings::start_date.desc())
            .offset(page.offset())
            .limit(page.limit())
            .load::<BookingRecord>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        records.into_iter().map(record_to_booking).collect()
    }
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn save(&self, booking: NewBooking) -> Result<Booking, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(bookings::table)
            .values(&NewBookingRow {
                start_date: booking.start,
                end_date: booking.end,
                status: booking.status.as_str(),
                booker_id: booking.booker_id,
                item_id: booking.item_id,
            })
            .get_result::<BookingRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let item = items::table
            .find(row.item_id)
            .select(ItemRefRow::as_select())
            .first::<ItemRefRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        record_to_booking((row, item))
    }

    async fn update_status(
        &self,
        booking_id: i64,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<u64, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(
            bookings::table.filter(
                bookings::id
                    .eq(booking_id)
                    .and(bookings::status.eq(expected.as_str())),
            ),
        )
        .set(bookings::status.eq(next.as_str()))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(u64::try_from(affected).unwrap_or(u64::MAX))
    }

    async fn find_by_id(&self, booking_id: i64) -> Result<Option<Booking>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let record = bookings::table
            .inner_join(items::table)
            .filter(bookings::id.eq(booking_id))
            .select(BookingRecord::as_select())
            .first::<BookingRecord>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        record.map(record_to_booking).transpose()
    }

    async fn find_all_by_item_id(&self, item_id: i64) -> Result<Vec<Booking>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let records = bookings::table
            .inner_join(items::table)
            .filter(bookings::item_id.eq(item_id))
            .order(bookings::start_date.desc())
            .select(BookingRecord::as_select())
            .load::<BookingRecord>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        records.into_iter().map(record_to_booking).collect()
    }

    async fn find_all_by_booker_id(
        &self,
        booker_id: i64,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings().filter(bookings::booker_id.eq(booker_id));
        self.load_page(query, page).await
    }

    async fn find_all_by_booker_id_and_status(
        &self,
        booker_id: i64,
        status: BookingStatus,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(bookings::booker_id.eq(booker_id))
            .filter(bookings::status.eq(status.as_str()));
        self.load_page(query, page).await
    }

    async fn find_all_by_booker_id_and_end_before(
        &self,
        booker_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(bookings::booker_id.eq(booker_id))
            .filter(bookings::end_date.lt(moment));
        self.load_page(query, page).await
    }

    async fn find_all_by_booker_id_and_start_after(
        &self,
        booker_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(bookings::booker_id.eq(booker_id))
            .filter(bookings::start_date.gt(moment));
        self.load_page(query, page).await
    }

    async fn find_all_by_booker_id_current(
        &self,
        booker_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(bookings::booker_id.eq(booker_id))
            .filter(bookings::start_date.lt(moment))
            .filter(bookings::end_date.gt(moment));
        self.load_page(query, page).await
    }

    async fn find_all_by_owner_id(
        &self,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings().filter(items::owner_id.eq(owner_id));
        self.load_page(query, page).await
    }

    async fn find_all_by_owner_id_and_status(
        &self,
        owner_id: i64,
        status: BookingStatus,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(items::owner_id.eq(owner_id))
            .filter(bookings::status.eq(status.as_str()));
        self.load_page(query, page).await
    }

    async fn find_all_by_owner_id_and_end_before(
        &self,
        owner_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(items::owner_id.eq(owner_id))
            .filter(bookings::end_date.lt(moment));
        self.load_page(query, page).await
    }

    async fn find_all_by_owner_id_and_start_after(
        &self,
        owner_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(items::owner_id.eq(owner_id))
            .filter(bookings::start_date.gt(moment));
        self.load_page(query, page).await
    }

    async fn find_all_by_owner_id_current(
        &self,
        owner_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError> {
        let query = joined_bookings()
            .filter(items::owner_id.eq(owner_id))
            .filter(bookings::start_date.lt(moment))
            .filter(bookings::end_date.gt(moment));
        self.load_page(query, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn record_conversion_parses_stored_status() {
        let now = Utc::now();
        let record = (
            BookingRow {
                id: 7,
                start_date: now,
                end_date: now + chrono::Duration::days(1),
                status: "APPROVED".to_owned(),
                booker_id: 2,
                item_id: 3,
            },
            ItemRefRow {
                id: 3,
                name: "Drill".to_owned(),
                owner_id: 1,
            },
        );

        let booking = record_to_booking(record).expect("valid record");
        assert_eq!(booking.status, BookingStatus::Approved);
        assert_eq!(booking.item.owner_id, 1);
    }

    #[rstest]
    fn record_conversion_rejects_unknown_status() {
        let now = Utc::now();
        let record = (
            BookingRow {
                id: 7,
                start_date: now,
                end_date: now,
                status: "PENDING".to_owned(),
                booker_id: 2,
                item_id: 3,
            },
            ItemRefRow {
                id: 3,
                name: "Drill".to_owned(),
                owner_id: 1,
            },
        );

        let error = record_to_booking(record).expect_err("unknown status");
        assert!(matches!(error, RepoError::Query { .. }));
    }
}
