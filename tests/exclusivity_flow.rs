use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use showroom_api::{
    db::{create_pool, run_migrations},
    dto::{
        catalog::{
            CategoryRequest, CreateModelRequest, CreateSeriesRequest, UpdateModelRequest,
            UpdateSeriesRequest,
        },
        company::{CreateBranchRequest, CreateCompanyRequest, UpdateBranchRequest},
        homepage::HeroSectionRequest,
        products::{
            CreateProductRequest, ProductImageInput, ProductPlacement, ProductVideoInput,
            UpdateProductImageRequest, UpdateProductRequest,
        },
    },
    entity::{
        branches::{Column as BranchCol, Entity as Branches},
        hero_sections::Entity as HeroSections,
        model_categories::Entity as ModelCategories,
        product_images::{Column as ImageCol, Entity as ProductImages},
        products::{Column as ProductCol, Entity as Products},
        series_categories::Entity as SeriesCategories,
        users::ActiveModel as UserActive,
    },
    error::AppError,
    middleware::auth::AuthUser,
    services::{catalog_service, company_service, homepage_service, product_service},
    state::AppState,
};
use std::time::Duration;

use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
}

// Tests share one database, so every fixture gets a unique name and nothing is truncated.
async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let Some(database_url) = database_url() else {
        eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration tests.");
        return Ok(None);
    };

    let pool = create_pool(&database_url, 5).await?;
    let state = AppState::new(pool, "test-secret");
    MIGRATED
        .get_or_try_init(|| async { run_migrations(&state.orm).await.map(|_| ()) })
        .await?;
    Ok(Some(state))
}

async fn create_admin(state: &AppState) -> anyhow::Result<AuthUser> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(format!("admin-{}@example.com", Uuid::new_v4())),
        password_hash: Set("dummy".into()),
        role: Set("admin".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        user_id: user.id,
        role: "admin".into(),
    })
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", &Uuid::new_v4().simple().to_string()[..12])
}

async fn create_company(state: &AppState, admin: &AuthUser) -> anyhow::Result<Uuid> {
    let resp = company_service::create_company(
        state,
        admin,
        CreateCompanyRequest {
            name: unique("company"),
            phone: None,
            whatsapp: "https://wa.me/905321234567".into(),
            mail_address: "info@example.com".into(),
            logo: "company_logos/logo.png".into(),
        },
    )
    .await?;
    Ok(resp.data.expect("company").id)
}

fn branch_request(is_main: bool) -> CreateBranchRequest {
    CreateBranchRequest {
        name: unique("branch"),
        email: None,
        address: None,
        photo: None,
        instagram_url: None,
        facebook_url: None,
        twitter_url: None,
        google_business_url: None,
        youtube_url: None,
        is_main,
    }
}

fn empty_branch_update() -> UpdateBranchRequest {
    UpdateBranchRequest {
        company_id: None,
        name: None,
        email: None,
        address: None,
        photo: None,
        instagram_url: None,
        facebook_url: None,
        twitter_url: None,
        google_business_url: None,
        youtube_url: None,
        is_main: None,
    }
}

async fn main_branches(state: &AppState, company_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
    Ok(Branches::find()
        .filter(BranchCol::CompanyId.eq(company_id))
        .filter(BranchCol::IsMain.eq(true))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|b| b.id)
        .collect())
}

fn product_request(name: &str, placement: ProductPlacement) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        placement,
        width: 200.0,
        height: 80.0,
        depth: 90.0,
        description: String::new(),
        stock: 1,
        images: vec![],
        videos: vec![],
    }
}

fn image(is_cover: bool) -> ProductImageInput {
    ProductImageInput {
        image: format!("product_images/{}.jpg", Uuid::new_v4()),
        alt_text: None,
        is_cover,
    }
}

async fn covers(state: &AppState, product_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
    Ok(ProductImages::find()
        .filter(ImageCol::ProductId.eq(product_id))
        .filter(ImageCol::IsCover.eq(true))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect())
}

async fn create_category(state: &AppState, admin: &AuthUser) -> anyhow::Result<Uuid> {
    let category = catalog_service::create_category(
        state,
        admin,
        CategoryRequest {
            name: unique("category"),
        },
    )
    .await?
    .data
    .expect("category");
    Ok(category.id)
}

async fn create_series(
    state: &AppState,
    admin: &AuthUser,
    category_id: Uuid,
) -> anyhow::Result<Uuid> {
    let series = catalog_service::create_series(
        state,
        admin,
        CreateSeriesRequest {
            category_id,
            name: unique("series"),
        },
    )
    .await?
    .data
    .expect("series");
    Ok(series.id)
}

async fn create_model(state: &AppState, admin: &AuthUser, series_id: Uuid) -> anyhow::Result<Uuid> {
    let model = catalog_service::create_model(
        state,
        admin,
        CreateModelRequest {
            series_id,
            category_id: None,
            name: unique("model"),
        },
    )
    .await?
    .data
    .expect("model");
    Ok(model.id)
}

async fn create_placed_product(
    state: &AppState,
    admin: &AuthUser,
    placement: ProductPlacement,
) -> anyhow::Result<Uuid> {
    let detail = product_service::create_product(
        state,
        admin,
        product_request(&unique("product"), placement),
    )
    .await?
    .data
    .expect("product");
    Ok(detail.product.id)
}

async fn product_category(state: &AppState, product_id: Uuid) -> anyhow::Result<Option<Uuid>> {
    let product = Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .expect("product exists");
    Ok(product.category_id)
}

#[tokio::test]
async fn main_branch_follows_the_last_promotion() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let company_id = create_company(&state, &admin).await?;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let resp =
            company_service::create_branch(&state, &admin, company_id, branch_request(false))
                .await?;
        ids.push(resp.data.expect("branch").id);
    }
    assert!(main_branches(&state, company_id).await?.is_empty());

    for id in &ids {
        company_service::set_main_branch(&state, &admin, company_id, *id).await?;
        assert_eq!(main_branches(&state, company_id).await?, vec![*id]);
    }

    // Creating a branch flagged as main takes the flag over.
    let resp =
        company_service::create_branch(&state, &admin, company_id, branch_request(true)).await?;
    let newest = resp.data.expect("branch").id;
    assert_eq!(main_branches(&state, company_id).await?, vec![newest]);

    // Demoting through a regular update leaves the company without a main branch.
    let mut update = empty_branch_update();
    update.is_main = Some(false);
    company_service::update_branch(&state, &admin, newest, update).await?;
    assert!(main_branches(&state, company_id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn saving_a_non_main_branch_leaves_the_main_one_alone() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let company_id = create_company(&state, &admin).await?;

    let main = company_service::create_branch(&state, &admin, company_id, branch_request(true))
        .await?
        .data
        .expect("branch")
        .id;
    let other = company_service::create_branch(&state, &admin, company_id, branch_request(false))
        .await?
        .data
        .expect("branch")
        .id;

    let mut update = empty_branch_update();
    update.is_main = Some(false);
    update.address = Some("Bağdat Cad. No:5".into());
    company_service::update_branch(&state, &admin, other, update).await?;

    let mut update = empty_branch_update();
    update.name = Some(unique("renamed"));
    company_service::update_branch(&state, &admin, other, update).await?;

    assert_eq!(main_branches(&state, company_id).await?, vec![main]);
    Ok(())
}

#[tokio::test]
async fn set_main_branch_rejects_branch_of_another_company() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let company_a = create_company(&state, &admin).await?;
    let company_b = create_company(&state, &admin).await?;

    let branch = company_service::create_branch(&state, &admin, company_a, branch_request(false))
        .await?
        .data
        .expect("branch")
        .id;

    let result = company_service::set_main_branch(&state, &admin, company_b, branch).await;
    assert!(matches!(result, Err(AppError::NotFound)));
    assert!(main_branches(&state, company_a).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn racing_cover_writes_leave_exactly_one_cover() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;

    let mut request = product_request(&unique("product"), ProductPlacement::default());
    request.images = vec![image(true), image(false), image(false)];
    let request_paths: Vec<String> = request.images.iter().map(|i| i.image.clone()).collect();
    let detail = product_service::create_product(&state, &admin, request)
        .await?
        .data
        .expect("product");
    let product_id = detail.product.id;
    assert_eq!(detail.images.len(), 3);
    assert!(detail.images[0].is_cover, "cover image is listed first");

    // Inline images keep their submitted order behind the cover.
    let submitted: Vec<&str> = request_paths.iter().map(String::as_str).collect();
    let listed: Vec<&str> = detail.images.iter().map(|i| i.image.as_str()).collect();
    assert_eq!(listed, submitted);

    let second = detail.images[1].id;
    let third = detail.images[2].id;

    let (a, b) = tokio::join!(
        product_service::set_cover_image(&state, &admin, product_id, second),
        product_service::set_cover_image(&state, &admin, product_id, third),
    );
    a?;
    b?;

    let current = covers(&state, product_id).await?;
    assert_eq!(current.len(), 1);
    assert!(current[0] == second || current[0] == third);

    // Two concurrent inserts flagged as cover behave the same way.
    let (a, b) = tokio::join!(
        product_service::add_image(&state, &admin, product_id, image(true)),
        product_service::add_image(&state, &admin, product_id, image(true)),
    );
    a?;
    b?;
    assert_eq!(covers(&state, product_id).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn product_with_two_covers_is_rejected_before_any_write() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;

    let name = unique("two-covers");
    let mut request = product_request(&name, ProductPlacement::default());
    request.images = vec![image(true), image(true)];

    let result = product_service::create_product(&state, &admin, request).await;
    let Err(AppError::Validation(errors)) = result else {
        panic!("expected a validation error");
    };
    assert!(errors.field_errors().contains_key("images"));

    let stored = Products::find()
        .filter(ProductCol::Name.eq(name))
        .count(&state.orm)
        .await?;
    assert_eq!(stored, 0);
    Ok(())
}

#[tokio::test]
async fn deleting_a_category_removes_its_whole_subtree() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;

    let category = catalog_service::create_category(
        &state,
        &admin,
        CategoryRequest {
            name: unique("category"),
        },
    )
    .await?
    .data
    .expect("category");
    let series = catalog_service::create_series(
        &state,
        &admin,
        CreateSeriesRequest {
            category_id: category.id,
            name: unique("series"),
        },
    )
    .await?
    .data
    .expect("series");
    let model = catalog_service::create_model(
        &state,
        &admin,
        CreateModelRequest {
            series_id: series.id,
            category_id: None,
            name: unique("model"),
        },
    )
    .await?
    .data
    .expect("model");
    assert_eq!(model.category_id, category.id, "category derived from series");

    let placement = ProductPlacement {
        category_id: Some(category.id),
        series_id: Some(series.id),
        model_id: Some(model.id),
    };
    let mut request = product_request(&unique("product"), placement);
    request.images = vec![image(true)];
    let product = product_service::create_product(&state, &admin, request)
        .await?
        .data
        .expect("product")
        .product;

    let tree = catalog_service::get_category_tree(&state, category.id)
        .await?
        .data
        .expect("tree");
    assert_eq!(tree.series.len(), 1);
    assert_eq!(tree.series[0].models.len(), 1);

    catalog_service::delete_category(&state, &admin, category.id).await?;

    assert!(SeriesCategories::find_by_id(series.id).one(&state.orm).await?.is_none());
    assert!(ModelCategories::find_by_id(model.id).one(&state.orm).await?.is_none());
    assert!(Products::find_by_id(product.id).one(&state.orm).await?.is_none());
    assert_eq!(covers(&state, product.id).await?.len(), 0);
    Ok(())
}

#[tokio::test]
async fn product_placement_must_follow_the_hierarchy() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;

    let mut categories = Vec::new();
    for _ in 0..2 {
        let category = catalog_service::create_category(
            &state,
            &admin,
            CategoryRequest {
                name: unique("category"),
            },
        )
        .await?
        .data
        .expect("category");
        categories.push(category.id);
    }
    let series = catalog_service::create_series(
        &state,
        &admin,
        CreateSeriesRequest {
            category_id: categories[0],
            name: unique("series"),
        },
    )
    .await?
    .data
    .expect("series");

    let placement = ProductPlacement {
        category_id: Some(categories[1]),
        series_id: Some(series.id),
        model_id: None,
    };
    let result =
        product_service::create_product(&state, &admin, product_request("mismatch", placement))
            .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = catalog_service::create_model(
        &state,
        &admin,
        CreateModelRequest {
            series_id: series.id,
            category_id: Some(categories[1]),
            name: unique("model"),
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    for id in categories {
        catalog_service::delete_category(&state, &admin, id).await?;
    }
    Ok(())
}

#[tokio::test]
async fn hero_section_put_is_an_upsert() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let hero_request = |title: &str| HeroSectionRequest {
        title: title.into(),
        description: String::new(),
        image: "hero_images/hero.jpg".into(),
        youtube_url: "https://www.youtube.com/shorts/abc123?feature=share".into(),
    };

    // Two first writes racing for the empty table: the loser hits the unique singleton.
    HeroSections::delete_many().exec(&state.orm).await?;
    let (a, b) = tokio::join!(
        homepage_service::put_hero(&state, &admin, hero_request("Bahar Koleksiyonu")),
        homepage_service::put_hero(&state, &admin, hero_request("Bahar Koleksiyonu")),
    );
    assert!(a.is_ok() || b.is_ok(), "one of the racing writes succeeds");
    for result in [a, b] {
        if let Err(err) = result {
            assert!(matches!(err, AppError::Conflict(_)), "unexpected error: {err}");
        }
    }
    assert_eq!(HeroSections::find().count(&state.orm).await?, 1);

    for title in ["Yaz Koleksiyonu", "Kış Koleksiyonu"] {
        homepage_service::put_hero(&state, &admin, hero_request(title)).await?;
    }

    assert_eq!(HeroSections::find().count(&state.orm).await?, 1);

    let hero = homepage_service::get_hero(&state).await?.data.expect("hero");
    assert_eq!(hero.title, "Kış Koleksiyonu");
    assert_eq!(hero.youtube_embed_url, "https://www.youtube.com/embed/abc123");

    let landing = homepage_service::landing_page(&state)
        .await?
        .data
        .expect("landing");
    assert_eq!(
        landing.hero_youtube_embed,
        "https://www.youtube.com/embed/abc123"
    );
    Ok(())
}

#[tokio::test]
async fn moving_a_series_carries_every_dependent_product() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let from = create_category(&state, &admin).await?;
    let to = create_category(&state, &admin).await?;
    let series = create_series(&state, &admin, from).await?;
    let model = create_model(&state, &admin, series).await?;

    let full = create_placed_product(
        &state,
        &admin,
        ProductPlacement {
            category_id: Some(from),
            series_id: Some(series),
            model_id: Some(model),
        },
    )
    .await?;
    let by_model = create_placed_product(
        &state,
        &admin,
        ProductPlacement {
            category_id: Some(from),
            series_id: None,
            model_id: Some(model),
        },
    )
    .await?;
    let by_series = create_placed_product(
        &state,
        &admin,
        ProductPlacement {
            category_id: Some(from),
            series_id: Some(series),
            model_id: None,
        },
    )
    .await?;
    let bystander = create_placed_product(
        &state,
        &admin,
        ProductPlacement {
            category_id: Some(from),
            series_id: None,
            model_id: None,
        },
    )
    .await?;

    catalog_service::update_series(
        &state,
        &admin,
        series,
        UpdateSeriesRequest {
            category_id: Some(to),
            name: None,
        },
    )
    .await?;

    let moved_model = ModelCategories::find_by_id(model)
        .one(&state.orm)
        .await?
        .expect("model");
    assert_eq!(moved_model.category_id, to);
    for product in [full, by_model, by_series] {
        assert_eq!(product_category(&state, product).await?, Some(to));
    }
    assert_eq!(product_category(&state, bystander).await?, Some(from));

    for id in [from, to] {
        catalog_service::delete_category(&state, &admin, id).await?;
    }
    Ok(())
}

#[tokio::test]
async fn moving_a_model_carries_its_products() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let from = create_category(&state, &admin).await?;
    let to = create_category(&state, &admin).await?;
    let old_series = create_series(&state, &admin, from).await?;
    let new_series = create_series(&state, &admin, to).await?;
    let model = create_model(&state, &admin, old_series).await?;

    let product = create_placed_product(
        &state,
        &admin,
        ProductPlacement {
            category_id: Some(from),
            series_id: Some(old_series),
            model_id: Some(model),
        },
    )
    .await?;

    let moved = catalog_service::update_model(
        &state,
        &admin,
        model,
        UpdateModelRequest {
            series_id: Some(new_series),
            name: None,
        },
    )
    .await?
    .data
    .expect("model");
    assert_eq!(moved.category_id, to);

    let stored = Products::find_by_id(product)
        .one(&state.orm)
        .await?
        .expect("product");
    assert_eq!(stored.series_id, Some(new_series));
    assert_eq!(stored.category_id, Some(to));
    assert_eq!(stored.model_id, Some(model));

    for id in [from, to] {
        catalog_service::delete_category(&state, &admin, id).await?;
    }
    Ok(())
}

#[tokio::test]
async fn product_update_rejects_a_placement_outside_the_hierarchy() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let home = create_category(&state, &admin).await?;
    let other = create_category(&state, &admin).await?;
    let series = create_series(&state, &admin, home).await?;

    let product = create_placed_product(
        &state,
        &admin,
        ProductPlacement {
            category_id: Some(home),
            series_id: Some(series),
            model_id: None,
        },
    )
    .await?;

    let result = product_service::update_product(
        &state,
        &admin,
        product,
        UpdateProductRequest {
            name: Some(unique("renamed")),
            placement: Some(ProductPlacement {
                category_id: Some(other),
                series_id: Some(series),
                model_id: None,
            }),
            width: None,
            height: None,
            depth: None,
            description: None,
            stock: None,
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(product_category(&state, product).await?, Some(home));

    for id in [home, other] {
        catalog_service::delete_category(&state, &admin, id).await?;
    }
    Ok(())
}

#[tokio::test]
async fn moving_a_main_branch_takes_over_the_new_company() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let company_a = create_company(&state, &admin).await?;
    let company_b = create_company(&state, &admin).await?;

    let travelling = company_service::create_branch(&state, &admin, company_a, branch_request(true))
        .await?
        .data
        .expect("branch")
        .id;
    let resident = company_service::create_branch(&state, &admin, company_b, branch_request(true))
        .await?
        .data
        .expect("branch")
        .id;
    assert_eq!(main_branches(&state, company_b).await?, vec![resident]);

    let mut update = empty_branch_update();
    update.company_id = Some(company_b);
    let moved = company_service::update_branch(&state, &admin, travelling, update)
        .await?
        .data
        .expect("branch");
    assert_eq!(moved.company_id, company_b);
    assert!(moved.is_main);

    assert!(main_branches(&state, company_a).await?.is_empty());
    assert_eq!(main_branches(&state, company_b).await?, vec![travelling]);
    Ok(())
}

#[tokio::test]
async fn videos_are_listed_newest_first() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;
    let product = create_placed_product(&state, &admin, ProductPlacement::default()).await?;

    for label in ["first", "second"] {
        product_service::add_video(
            &state,
            &admin,
            product,
            ProductVideoInput {
                video: Some(format!("product_videos/{label}.mp4")),
                alt_text: Some(label.into()),
            },
        )
        .await?;
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let videos = product_service::list_videos(&state, product)
        .await?
        .data
        .expect("videos")
        .items;
    let order: Vec<_> = videos.iter().map(|v| v.alt_text.as_deref()).collect();
    assert_eq!(order, vec![Some("second"), Some("first")]);
    Ok(())
}

#[tokio::test]
async fn blank_alt_text_clears_an_image_caption() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let admin = create_admin(&state).await?;

    let mut request = product_request(&unique("product"), ProductPlacement::default());
    let mut captioned = image(false);
    captioned.alt_text = Some("Ön görünüm".into());
    request.images = vec![captioned];
    let detail = product_service::create_product(&state, &admin, request)
        .await?
        .data
        .expect("product");
    let image_id = detail.images[0].id;
    assert_eq!(detail.images[0].alt_text.as_deref(), Some("Ön görünüm"));

    let updated = product_service::update_image(
        &state,
        &admin,
        detail.product.id,
        image_id,
        UpdateProductImageRequest {
            image: None,
            alt_text: Some("  ".into()),
            is_cover: None,
        },
    )
    .await?
    .data
    .expect("image");
    assert_eq!(updated.alt_text, None);
    Ok(())
}

#[tokio::test]
async fn writes_require_the_admin_role() -> anyhow::Result<()> {
    // Never connects: the role check runs before any query.
    let pool = sqlx::postgres::PgPoolOptions::new().connect_lazy("postgres://localhost/unused")?;
    let state = AppState::new(pool, "test-secret");
    let user = AuthUser {
        user_id: Uuid::new_v4(),
        role: "user".into(),
    };

    let result = product_service::set_cover_image(&state, &user, Uuid::new_v4(), Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::Forbidden)));

    let result = company_service::set_main_branch(&state, &user, Uuid::new_v4(), Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::Forbidden)));
    Ok(())
}
