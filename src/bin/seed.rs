use showroom_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    services::auth_service::hash_password,
};
use sqlx::PgPool;
use uuid::Uuid;

const SAMPLE_COMPANY: &str = "Örnek Mobilya";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    for file in run_migrations(&create_orm_conn(&pool)).await? {
        println!("Migration applied: {file}");
    }

    let admin_id = ensure_user_with_role(&pool, "admin@example.com", "admin123", "admin").await?;

    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM companies WHERE name = $1")
        .bind(SAMPLE_COMPANY)
        .fetch_optional(&pool)
        .await?;
    if existing.is_some() {
        println!("Sample data already present, skipping");
    } else {
        seed_company(&pool).await?;
        seed_catalog(&pool).await?;
        seed_homepage(&pool).await?;
    }

    println!("Seed completed. Admin ID: {admin_id}");
    Ok(())
}

async fn ensure_user_with_role(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let (user_id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, password_hash, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}

async fn seed_company(pool: &PgPool) -> anyhow::Result<()> {
    let company_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO companies (id, name, phone, whatsapp, mail_address, logo)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(company_id)
    .bind(SAMPLE_COMPANY)
    .bind("05321234567")
    .bind("https://wa.me/905321234567")
    .bind("info@example.com")
    .bind("company_logos/logo.png")
    .execute(pool)
    .await?;

    let branches = [
        ("Merkez Showroom", "Atatürk Cad. No:1, Kadıköy", true),
        ("Ankara Şube", "Tunalı Hilmi Cad. No:12, Çankaya", false),
    ];
    for (name, address, is_main) in branches {
        let branch_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO branches (id, company_id, name, address, is_main)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(branch_id)
        .bind(company_id)
        .bind(name)
        .bind(address)
        .bind(is_main)
        .execute(pool)
        .await?;

        sqlx::query(
            "INSERT INTO branch_phone_numbers (id, branch_id, name, phone_number) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(branch_id)
        .bind("Satış")
        .bind("05329876543")
        .execute(pool)
        .await?;
    }

    println!("Seeded company and branches");
    Ok(())
}

async fn seed_catalog(pool: &PgPool) -> anyhow::Result<()> {
    let category_id = Uuid::new_v4();
    let series_id = Uuid::new_v4();
    let model_id = Uuid::new_v4();

    sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2)")
        .bind(category_id)
        .bind("Oturma Grupları")
        .execute(pool)
        .await?;
    sqlx::query("INSERT INTO series_categories (id, category_id, name) VALUES ($1, $2, $3)")
        .bind(series_id)
        .bind(category_id)
        .bind("Loft")
        .execute(pool)
        .await?;
    sqlx::query(
        "INSERT INTO model_categories (id, category_id, series_id, name) VALUES ($1, $2, $3, $4)",
    )
    .bind(model_id)
    .bind(category_id)
    .bind(series_id)
    .bind("Loft Köşe")
    .execute(pool)
    .await?;

    let products = [
        ("Loft Köşe Koltuk", 280.0, 85.0, 180.0, 4),
        ("Loft Üçlü Kanepe", 220.0, 85.0, 95.0, 7),
    ];
    for (name, width, height, depth, stock) in products {
        let product_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO products (id, name, category_id, series_id, model_id, width, height, depth, description, stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(product_id)
        .bind(name)
        .bind(category_id)
        .bind(series_id)
        .bind(model_id)
        .bind(width)
        .bind(height)
        .bind(depth)
        .bind("<p>Yıkanabilir kumaş, gürgen iskelet.</p>")
        .bind(stock)
        .execute(pool)
        .await?;

        for (idx, is_cover) in [true, false].into_iter().enumerate() {
            sqlx::query(
                "INSERT INTO product_images (id, product_id, image, alt_text, is_cover) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(product_id)
            .bind(format!("product_images/{product_id}_{idx}.jpg"))
            .bind(name)
            .bind(is_cover)
            .execute(pool)
            .await?;
        }
    }

    println!("Seeded catalog");
    Ok(())
}

async fn seed_homepage(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO hero_sections (id, title, description, image, youtube_url)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (singleton) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("Yeni Sezon Koleksiyonu")
    .bind("Evinize yakışan konfor.")
    .bind("hero_images/hero.jpg")
    .bind("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO about_sections (id, header, sub_header, home_description, detail_description, image)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("Hakkımızda")
    .bind("1985'ten beri")
    .bind("Üç kuşaktır mobilya üretiyoruz.")
    .bind("<p>Atölyemizde her parça elde işlenir.</p>")
    .bind("about_images/workshop.jpg")
    .execute(pool)
    .await?;

    for (title, value, icon) in [("Mutlu Müşteri", 12000, "fa-smile"), ("Showroom", 2, "fa-store")] {
        sqlx::query("INSERT INTO statistics (id, title, value, icon) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::new_v4())
            .bind(title)
            .bind(value)
            .bind(icon)
            .execute(pool)
            .await?;
    }

    sqlx::query("INSERT INTO our_values (id, title, description, image) VALUES ($1, $2, $3, $4)")
        .bind(Uuid::new_v4())
        .bind("Kalite")
        .bind("Malzeme seçiminden teslimata kadar her adımda aynı özeni gösteriyoruz.")
        .bind("value_images/quality.png")
        .execute(pool)
        .await?;

    sqlx::query("INSERT INTO faqs (id, question, answer) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind("Teslimat süresi ne kadar?")
        .bind("Stoktaki ürünler 3 iş günü içinde, siparişe özel ürünler 4 hafta içinde teslim edilir.")
        .execute(pool)
        .await?;

    sqlx::query("INSERT INTO business_partners (id, name, image, img_alt) VALUES ($1, $2, $3, $4)")
        .bind(Uuid::new_v4())
        .bind("Kumaş Tedarik A.Ş.")
        .bind("partner_images/kumas.png")
        .bind("Kumaş Tedarik logosu")
        .execute(pool)
        .await?;

    println!("Seeded homepage content");
    Ok(())
}
