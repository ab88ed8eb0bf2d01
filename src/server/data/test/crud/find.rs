use super::*;
use crate::model::query::{FilterDto, FilterValue, SearchDto, SortDirection, SortingDto, UNLIMITED};

fn query(request: FindRequest) -> FindQuery<product::Entity> {
    FindQuery::from_request(&request).unwrap()
}

/// Seeds three active products and one inactive product.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for code in ["AB-100", "AB-200", "CD-300"] {
        factory::product::ProductFactory::new(db)
            .product_code(code)
            .build()
            .await?;
    }
    factory::product::ProductFactory::new(db)
        .product_code("AB-400")
        .status(ItemStatus::Inactive)
        .build()
        .await?;

    Ok(())
}

/// Tests that the second page holds the remaining active rows.
///
/// Expected: Ok with one row on page two and a total of three active rows
#[tokio::test]
async fn returns_requested_page_and_status_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CrudRepository::<product::Entity>::new(db);
    let page = repo
        .find(&query(FindRequest {
            paginator: PaginatorDto {
                page: 2,
                page_size: 2,
            },
            ..Default::default()
        }))
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].product_code, "CD-300");
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 2);

    Ok(())
}

/// Tests that a search term narrows the rows and the total.
///
/// Expected: Ok with the two active products whose code contains "AB"
#[tokio::test]
async fn search_total_counts_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CrudRepository::<product::Entity>::new(db);
    let page = repo
        .find(&query(FindRequest {
            search: SearchDto {
                field: "productCode".to_string(),
                term: "AB".to_string(),
            },
            ..Default::default()
        }))
        .await?;

    let codes: Vec<&str> = page.items.iter().map(|p| p.product_code.as_str()).collect();
    assert_eq!(codes, vec!["AB-100", "AB-200"]);
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests filtering by explicit ids, which ignores status.
///
/// Expected: Ok with exactly the requested rows, inactive included
#[tokio::test]
async fn filters_by_listed_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;
    let all = product::Entity::find().all(db).await?;
    let inactive = all.iter().find(|p| p.status == ItemStatus::Inactive).unwrap();

    let repo = CrudRepository::<product::Entity>::new(db);
    let page = repo
        .find(&query(FindRequest {
            filter: FilterDto {
                field: "id".to_string(),
                items: vec![
                    FilterValue::Int(all[0].id as i64),
                    FilterValue::Int(inactive.id as i64),
                ],
                ..Default::default()
            },
            ..Default::default()
        }))
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![all[0].id, inactive.id]);

    Ok(())
}

/// Tests descending order without a page limit.
///
/// Expected: Ok with every active row, last code first
#[tokio::test]
async fn sorts_descending_without_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CrudRepository::<product::Entity>::new(db);
    let page = repo
        .find(&query(FindRequest {
            paginator: PaginatorDto {
                page: 1,
                page_size: UNLIMITED,
            },
            sorting: SortingDto {
                column: "productCode".to_string(),
                direction: SortDirection::Desc,
            },
            ..Default::default()
        }))
        .await?;

    let codes: Vec<&str> = page.items.iter().map(|p| p.product_code.as_str()).collect();
    assert_eq!(codes, vec!["CD-300", "AB-200", "AB-100"]);
    assert_eq!(page.total, 3);

    Ok(())
}
