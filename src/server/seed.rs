//! Demo data inserted at startup when `SEED_DATABASE` is enabled.

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{
    model::employee::Gender,
    server::{
        data::{
            cafe::CafeRepository, employee::EmployeeRepository,
            employee_cafe::EmployeeCafeRepository,
        },
        error::Error,
        model::{cafe::NewCafe, employee::NewEmployee},
        util::transaction::in_transaction,
    },
};

/// (name, description, location)
const CAFES: [(&str, &str, &str); 5] = [
    (
        "JavaBeans",
        "A cozy cafe specializing in premium coffee and pastries.",
        "Central",
    ),
    (
        "CuppaJoy",
        "Modern cafe with artisanal teas and organic snacks.",
        "East",
    ),
    (
        "BeanHere",
        "Hip cafe with specialty coffee and all-day breakfast.",
        "West",
    ),
    (
        "TeaTime",
        "Elegant tea house with a wide selection of teas.",
        "North",
    ),
    (
        "BrewHub",
        "Coffee shop with workspace and fast WiFi.",
        "Central",
    ),
];

/// (id, name, email, phone, gender)
const EMPLOYEES: [(&str, &str, &str, &str, Gender); 8] = [
    ("UI1234ABC", "John Doe", "john.doe@example.com", "98765432", Gender::Male),
    ("UI2345BCD", "Jane Smith", "jane.smith@example.com", "87654321", Gender::Female),
    ("UI3456CDE", "Alex Wong", "alex.wong@example.com", "91234567", Gender::Male),
    ("UI4567DEF", "Maria Lee", "maria.lee@example.com", "82345678", Gender::Female),
    ("UI5678EFG", "Sam Tan", "sam.tan@example.com", "93456789", Gender::Male),
    ("UI6789FGH", "Jenny Lim", "jenny.lim@example.com", "84567890", Gender::Female),
    ("UI7890GHI", "Mike Chen", "mike.chen@example.com", "95678901", Gender::Male),
    ("UI8901HIJ", "Lisa Park", "lisa.park@example.com", "86789012", Gender::Female),
];

/// (employee id, index into `CAFES`, start date)
const ASSIGNMENTS: [(&str, usize, (i32, u32, u32)); 8] = [
    ("UI1234ABC", 0, (2023, 1, 15)),
    ("UI2345BCD", 0, (2023, 3, 10)),
    ("UI3456CDE", 1, (2023, 5, 20)),
    ("UI4567DEF", 1, (2023, 7, 5)),
    ("UI5678EFG", 2, (2023, 2, 28)),
    ("UI6789FGH", 3, (2023, 4, 17)),
    ("UI7890GHI", 4, (2023, 6, 22)),
    ("UI8901HIJ", 2, (2023, 8, 11)),
];

/// Inserts the demo cafés, employees, and assignments if there are no cafés yet.
///
/// Everything is inserted in one transaction.
///
/// # Returns
/// - `Ok(true)` - Demo data inserted
/// - `Ok(false)` - Cafés already exist, nothing was inserted
/// - `Err(Error::DbErr)` - Database operation failed, nothing was inserted
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<bool, Error> {
    if entity::prelude::Cafe::find().count(db).await? > 0 {
        tracing::debug!("Skipping seed, cafes already exist");

        return Ok(false);
    }

    in_transaction(db, |txn| {
        Box::pin(async move {
            let cafe_repo = CafeRepository::new(txn);
            let employee_repo = EmployeeRepository::new(txn);
            let assignment_repo = EmployeeCafeRepository::new(txn);

            let mut cafe_ids = Vec::with_capacity(CAFES.len());
            for (name, description, location) in CAFES {
                let cafe = cafe_repo
                    .create(NewCafe {
                        name: name.to_string(),
                        description: description.to_string(),
                        location: location.to_string(),
                        logo: None,
                    })
                    .await?;
                cafe_ids.push(cafe.id);
            }

            for (id, name, email_address, phone_number, gender) in EMPLOYEES {
                employee_repo
                    .create(
                        id,
                        NewEmployee {
                            name: name.to_string(),
                            email_address: email_address.to_string(),
                            phone_number: phone_number.to_string(),
                            gender,
                        },
                    )
                    .await?;
            }

            for (employee_id, cafe_index, (year, month, day)) in ASSIGNMENTS {
                let start_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    Error::InternalError(format!(
                        "Invalid seed start date {}-{}-{}",
                        year, month, day
                    ))
                })?;
                let cafe_id = cafe_ids.get(cafe_index).ok_or_else(|| {
                    Error::InternalError(format!("Invalid seed cafe index {}", cafe_index))
                })?;

                assignment_repo
                    .create(employee_id, cafe_id, start_date)
                    .await?;
            }

            Ok::<_, Error>(())
        })
    })
    .await?;

    tracing::info!(
        "Seeded {} cafes, {} employees, and {} assignments",
        CAFES.len(),
        EMPLOYEES.len(),
        ASSIGNMENTS.len()
    );

    Ok(true)
}
