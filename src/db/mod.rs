use crate::types::address::{Address, RawAddress};
use crate::types::conveyancer::{CompanyName, RawConveyancer};
use crate::types::id::Id;
use crate::types::owner::{Owner, RawOwner};
use crate::types::segment::{RawSegment, Segment};
use crate::types::title::{RawTitle, Title, TitleNumber};
use sqlx::mysql::MySqlPool;

pub async fn fetch_segment_by_id(
    db_pool: &MySqlPool,
    segment_id: Id,
) -> sqlx::Result<Option<Segment>> {
    sqlx::query_as::<_, RawSegment>(
        "
        SELECT
            segment_id,
            created_at,
            coordinate_origin,
            coordinate_end
        FROM segment
        WHERE
            segment_id = ?
        ",
    )
    .bind(segment_id)
    .fetch_optional(db_pool)
    .await
    .map(|result| result.map(Segment::from_raw))
}

pub async fn fetch_address_by_id(
    db_pool: &MySqlPool,
    address_id: Id,
) -> sqlx::Result<Option<Address>> {
    let Some(raw_address) = sqlx::query_as::<_, RawAddress>(
        "
        SELECT
            house_name_or_number,
            street_name,
            city,
            county,
            country,
            postcode,
            segment_id
        FROM address
        WHERE
            address_id = ?
        ",
    )
    .bind(address_id)
    .fetch_optional(db_pool)
    .await?
    else {
        return Ok(None);
    };

    let segment = fetch_segment_by_id(db_pool, raw_address.segment_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Some(Address::from_raw(raw_address, segment)))
}

pub async fn fetch_owner_by_identity(
    db_pool: &MySqlPool,
    identity: Id,
) -> sqlx::Result<Option<Owner>> {
    let Some(raw_owner) = sqlx::query_as::<_, RawOwner>(
        "
        SELECT
            identity,
            forename,
            surname,
            email,
            phone,
            owner_type,
            address_id
        FROM owner
        WHERE
            identity = ?
        ",
    )
    .bind(identity)
    .fetch_optional(db_pool)
    .await?
    else {
        return Ok(None);
    };

    let address = fetch_address_by_id(db_pool, raw_owner.address_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Some(Owner::from_raw(raw_owner, address)))
}

pub async fn fetch_title_by_number(
    db_pool: &MySqlPool,
    title_number: &TitleNumber,
) -> sqlx::Result<Option<Title>> {
    let Some(raw_title) = sqlx::query_as::<_, RawTitle>(
        "
        SELECT
            title_number,
            created_at,
            updated_at,
            `lock`,
            owner_identity,
            address_id
        FROM title
        WHERE
            title_number = ?
        ",
    )
    .bind(title_number.as_ref())
    .fetch_optional(db_pool)
    .await?
    else {
        return Ok(None);
    };

    let owner = fetch_owner_by_identity(db_pool, raw_title.owner_identity)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    let address = fetch_address_by_id(db_pool, raw_title.address_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Some(Title::from_raw(raw_title, owner, address)))
}

pub async fn fetch_raw_conveyancer_by_id(
    db_pool: &MySqlPool,
    conveyancer_id: Id,
) -> sqlx::Result<Option<RawConveyancer>> {
    sqlx::query_as::<_, RawConveyancer>(
        "
        SELECT
            conveyancer_id,
            x500_name,
            company_name
        FROM conveyancer
        WHERE
            conveyancer_id = ?
        ",
    )
    .bind(conveyancer_id)
    .fetch_optional(db_pool)
    .await
}

pub async fn fetch_raw_conveyancers(db_pool: &MySqlPool) -> sqlx::Result<Vec<RawConveyancer>> {
    sqlx::query_as::<_, RawConveyancer>(
        "
        SELECT
            conveyancer_id,
            x500_name,
            company_name
        FROM conveyancer
        ORDER BY
            conveyancer_id ASC
        ",
    )
    .fetch_all(db_pool)
    .await
}

/// `x500_name` must be in canonical form, the column is unique on it.
pub async fn insert_conveyancer(
    db_pool: &MySqlPool,
    x500_name: &str,
    company_name: &CompanyName,
) -> sqlx::Result<Id> {
    sqlx::query(
        "
        INSERT INTO conveyancer
        (
            x500_name,
            company_name
        )
        VALUES
        (
            ?,
            ?
        )
        ",
    )
    .bind(x500_name)
    .bind(company_name.as_ref())
    .execute(db_pool)
    .await
    .map(|result| result.last_insert_id())
}

pub async fn is_x500_name_taken(db_pool: &MySqlPool, x500_name: &str) -> sqlx::Result<bool> {
    sqlx::query(
        "
        SELECT
            conveyancer_id
        FROM conveyancer
        WHERE
            x500_name = ?
        ",
    )
    .bind(x500_name)
    .fetch_optional(db_pool)
    .await
    .map(|result| result.is_some())
}
