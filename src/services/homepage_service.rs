use sea_orm::{
    ActiveModelTrait, EntityTrait, PrimaryKeyTrait, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    audit::audit_write,
    display::truncate_with_ellipsis,
    dto::homepage::{
        AboutSectionList, AboutSectionRequest, BusinessPartnerList, BusinessPartnerRequest,
        FaqList, FaqRequest, HeroSectionRequest, LandingPage, OurValueList, OurValueRequest,
        StatisticList, StatisticRequest,
    },
    entity::{
        about_sections::{
            ActiveModel as AboutActive, Column as AboutCol, Entity as AboutSections,
            Model as AboutModel,
        },
        business_partners::{
            ActiveModel as PartnerActive, Column as PartnerCol, Entity as BusinessPartners,
            Model as PartnerModel,
        },
        companies::{Column as CompanyCol, Entity as Companies},
        faqs::{ActiveModel as FaqActive, Column as FaqCol, Entity as Faqs, Model as FaqModel},
        hero_sections::{ActiveModel as HeroActive, Entity as HeroSections, Model as HeroModel},
        our_values::{
            ActiveModel as ValueActive, Column as ValueCol, Entity as OurValues,
            Model as ValueModel,
        },
        statistics::{
            ActiveModel as StatisticActive, Column as StatisticCol, Entity as Statistics,
            Model as StatisticModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{AboutSection, BusinessPartner, Faq, HeroSection, OurValue, Statistic},
    response::{ApiResponse, Meta},
    services::company_service::company_from_entity,
    state::AppState,
    youtube::yt_embed_url,
};

const SHORT_FAQ_LEN: usize = 70;
const SHORT_VALUE_LEN: usize = 60;

// ---- landing ----

/// Aggregate behind the public landing page.
pub async fn landing_page(state: &AppState) -> AppResult<ApiResponse<LandingPage>> {
    let hero_section = HeroSections::find()
        .one(&state.orm)
        .await?
        .map(hero_from_entity);
    let hero_youtube_embed = hero_section
        .as_ref()
        .map(|hero| hero.youtube_embed_url.clone())
        .unwrap_or_default();

    let about_section = AboutSections::find()
        .order_by_asc(AboutCol::Header)
        .one(&state.orm)
        .await?
        .map(about_from_entity);

    let statistic_area = Statistics::find()
        .order_by_asc(StatisticCol::Title)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(statistic_from_entity)
        .collect();

    let our_values = OurValues::find()
        .order_by_asc(ValueCol::Title)
        .one(&state.orm)
        .await?
        .map(value_from_entity);

    let faq = Faqs::find()
        .order_by_asc(FaqCol::Question)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(faq_from_entity)
        .collect();

    let company = Companies::find()
        .order_by_asc(CompanyCol::Name)
        .one(&state.orm)
        .await?
        .map(company_from_entity);

    let business_partners = BusinessPartners::find()
        .order_by_asc(PartnerCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(partner_from_entity)
        .collect();

    let data = LandingPage {
        hero_section,
        about_section,
        statistic_area,
        our_values,
        faq,
        company,
        business_partners,
        hero_youtube_embed,
    };
    Ok(ApiResponse::success("Homepage", data, None))
}

// ---- hero ----

pub async fn get_hero(state: &AppState) -> AppResult<ApiResponse<HeroSection>> {
    let hero = HeroSections::find()
        .one(&state.orm)
        .await?
        .map(hero_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Hero section", hero, None))
}

/// Creates the hero section or overwrites the one that exists.
///
/// The table admits a single row; a racing first insert surfaces as a conflict.
pub async fn put_hero(
    state: &AppState,
    user: &AuthUser,
    payload: HeroSectionRequest,
) -> AppResult<ApiResponse<HeroSection>> {
    ensure_admin(user)?;
    payload.validate()?;

    let txn = state.orm.begin().await?;
    let hero = match HeroSections::find().one(&txn).await? {
        Some(existing) => {
            let mut active: HeroActive = existing.into();
            active.title = Set(payload.title);
            active.description = Set(payload.description);
            active.image = Set(payload.image);
            active.youtube_url = Set(payload.youtube_url);
            active.update(&txn).await?
        }
        None => {
            let active = HeroActive {
                id: Set(Uuid::new_v4()),
                title: Set(payload.title),
                description: Set(payload.description),
                image: Set(payload.image),
                youtube_url: Set(payload.youtube_url),
            };
            active.insert(&txn).await?
        }
    };
    txn.commit().await?;

    audit_write(
        &state.pool,
        user,
        "hero_section_put",
        "hero_sections",
        serde_json::json!({ "hero_section_id": hero.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Hero section saved",
        hero_from_entity(hero),
        Some(Meta::empty()),
    ))
}

// ---- about ----

pub async fn list_about(state: &AppState) -> AppResult<ApiResponse<AboutSectionList>> {
    let items = AboutSections::find()
        .order_by_asc(AboutCol::Header)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(about_from_entity)
        .collect();
    Ok(ApiResponse::success("About sections", AboutSectionList { items }, None))
}

pub async fn create_about(
    state: &AppState,
    user: &AuthUser,
    payload: AboutSectionRequest,
) -> AppResult<ApiResponse<AboutSection>> {
    ensure_admin(user)?;
    payload.validate()?;

    let about = AboutActive {
        id: Set(Uuid::new_v4()),
        header: Set(payload.header),
        sub_header: Set(payload.sub_header),
        home_description: Set(payload.home_description),
        detail_description: Set(payload.detail_description),
        image: Set(payload.image),
    }
    .insert(&state.orm)
    .await?;

    audit_write(
        &state.pool,
        user,
        "about_section_create",
        "about_sections",
        serde_json::json!({ "about_section_id": about.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "About section created",
        about_from_entity(about),
        Some(Meta::empty()),
    ))
}

pub async fn update_about(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: AboutSectionRequest,
) -> AppResult<ApiResponse<AboutSection>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = AboutSections::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: AboutActive = existing.into();
    active.header = Set(payload.header);
    active.sub_header = Set(payload.sub_header);
    active.home_description = Set(payload.home_description);
    active.detail_description = Set(payload.detail_description);
    active.image = Set(payload.image);
    let about = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "about_section_update",
        "about_sections",
        serde_json::json!({ "about_section_id": about.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        about_from_entity(about),
        Some(Meta::empty()),
    ))
}

pub async fn delete_about(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    delete_row::<AboutSections>(state, user, id, "about_section_delete", "about_sections").await
}

// ---- statistics ----

pub async fn list_statistics(state: &AppState) -> AppResult<ApiResponse<StatisticList>> {
    let items = Statistics::find()
        .order_by_asc(StatisticCol::Title)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(statistic_from_entity)
        .collect();
    Ok(ApiResponse::success("Statistics", StatisticList { items }, None))
}

pub async fn create_statistic(
    state: &AppState,
    user: &AuthUser,
    payload: StatisticRequest,
) -> AppResult<ApiResponse<Statistic>> {
    ensure_admin(user)?;
    payload.validate()?;

    let statistic = StatisticActive {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        value: Set(payload.value),
        icon: Set(payload.icon),
    }
    .insert(&state.orm)
    .await?;

    audit_write(
        &state.pool,
        user,
        "statistic_create",
        "statistics",
        serde_json::json!({ "statistic_id": statistic.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Statistic created",
        statistic_from_entity(statistic),
        Some(Meta::empty()),
    ))
}

pub async fn update_statistic(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: StatisticRequest,
) -> AppResult<ApiResponse<Statistic>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = Statistics::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: StatisticActive = existing.into();
    active.title = Set(payload.title);
    active.value = Set(payload.value);
    active.icon = Set(payload.icon);
    let statistic = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "statistic_update",
        "statistics",
        serde_json::json!({ "statistic_id": statistic.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        statistic_from_entity(statistic),
        Some(Meta::empty()),
    ))
}

pub async fn delete_statistic(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    delete_row::<Statistics>(state, user, id, "statistic_delete", "statistics").await
}

// ---- our values ----

pub async fn list_values(state: &AppState) -> AppResult<ApiResponse<OurValueList>> {
    let items = OurValues::find()
        .order_by_asc(ValueCol::Title)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(value_from_entity)
        .collect();
    Ok(ApiResponse::success("Our values", OurValueList { items }, None))
}

pub async fn create_value(
    state: &AppState,
    user: &AuthUser,
    payload: OurValueRequest,
) -> AppResult<ApiResponse<OurValue>> {
    ensure_admin(user)?;
    payload.validate()?;

    let value = ValueActive {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        description: Set(payload.description),
        image: Set(payload.image),
    }
    .insert(&state.orm)
    .await?;

    audit_write(
        &state.pool,
        user,
        "our_value_create",
        "our_values",
        serde_json::json!({ "our_value_id": value.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Value created",
        value_from_entity(value),
        Some(Meta::empty()),
    ))
}

pub async fn update_value(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: OurValueRequest,
) -> AppResult<ApiResponse<OurValue>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = OurValues::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ValueActive = existing.into();
    active.title = Set(payload.title);
    active.description = Set(payload.description);
    active.image = Set(payload.image);
    let value = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "our_value_update",
        "our_values",
        serde_json::json!({ "our_value_id": value.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        value_from_entity(value),
        Some(Meta::empty()),
    ))
}

pub async fn delete_value(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    delete_row::<OurValues>(state, user, id, "our_value_delete", "our_values").await
}

// ---- faq ----

pub async fn list_faqs(state: &AppState) -> AppResult<ApiResponse<FaqList>> {
    let items = Faqs::find()
        .order_by_asc(FaqCol::Question)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(faq_from_entity)
        .collect();
    Ok(ApiResponse::success("FAQ", FaqList { items }, None))
}

pub async fn create_faq(
    state: &AppState,
    user: &AuthUser,
    payload: FaqRequest,
) -> AppResult<ApiResponse<Faq>> {
    ensure_admin(user)?;
    payload.validate()?;

    let faq = FaqActive {
        id: Set(Uuid::new_v4()),
        question: Set(payload.question),
        answer: Set(payload.answer),
    }
    .insert(&state.orm)
    .await?;

    audit_write(
        &state.pool,
        user,
        "faq_create",
        "faqs",
        serde_json::json!({ "faq_id": faq.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "FAQ created",
        faq_from_entity(faq),
        Some(Meta::empty()),
    ))
}

pub async fn update_faq(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: FaqRequest,
) -> AppResult<ApiResponse<Faq>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = Faqs::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: FaqActive = existing.into();
    active.question = Set(payload.question);
    active.answer = Set(payload.answer);
    let faq = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "faq_update",
        "faqs",
        serde_json::json!({ "faq_id": faq.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        faq_from_entity(faq),
        Some(Meta::empty()),
    ))
}

pub async fn delete_faq(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    delete_row::<Faqs>(state, user, id, "faq_delete", "faqs").await
}

// ---- business partners ----

pub async fn list_partners(state: &AppState) -> AppResult<ApiResponse<BusinessPartnerList>> {
    let items = BusinessPartners::find()
        .order_by_asc(PartnerCol::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(partner_from_entity)
        .collect();
    Ok(ApiResponse::success(
        "Business partners",
        BusinessPartnerList { items },
        None,
    ))
}

pub async fn create_partner(
    state: &AppState,
    user: &AuthUser,
    payload: BusinessPartnerRequest,
) -> AppResult<ApiResponse<BusinessPartner>> {
    ensure_admin(user)?;
    payload.validate()?;

    let partner = PartnerActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        image: Set(payload.image),
        img_alt: Set(payload.img_alt),
    }
    .insert(&state.orm)
    .await?;

    audit_write(
        &state.pool,
        user,
        "business_partner_create",
        "business_partners",
        serde_json::json!({ "business_partner_id": partner.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Business partner created",
        partner_from_entity(partner),
        Some(Meta::empty()),
    ))
}

pub async fn update_partner(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: BusinessPartnerRequest,
) -> AppResult<ApiResponse<BusinessPartner>> {
    ensure_admin(user)?;
    payload.validate()?;

    let existing = BusinessPartners::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: PartnerActive = existing.into();
    active.name = Set(payload.name);
    active.image = Set(payload.image);
    active.img_alt = Set(payload.img_alt);
    let partner = active.update(&state.orm).await?;

    audit_write(
        &state.pool,
        user,
        "business_partner_update",
        "business_partners",
        serde_json::json!({ "business_partner_id": partner.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        partner_from_entity(partner),
        Some(Meta::empty()),
    ))
}

pub async fn delete_partner(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    delete_row::<BusinessPartners>(state, user, id, "business_partner_delete", "business_partners")
        .await
}

// ---- helpers ----

async fn delete_row<E>(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    action: &str,
    resource: &str,
) -> AppResult<ApiResponse<serde_json::Value>>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    ensure_admin(user)?;
    let result = E::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit_write(&state.pool, user, action, resource, serde_json::json!({ "id": id })).await;

    Ok(ApiResponse::deleted())
}

fn hero_from_entity(model: HeroModel) -> HeroSection {
    HeroSection {
        id: model.id,
        youtube_embed_url: yt_embed_url(&model.youtube_url),
        title: model.title,
        description: model.description,
        image: model.image,
        youtube_url: model.youtube_url,
    }
}

fn about_from_entity(model: AboutModel) -> AboutSection {
    AboutSection {
        id: model.id,
        header: model.header,
        sub_header: model.sub_header,
        home_description: model.home_description,
        detail_description: model.detail_description,
        image: model.image,
    }
}

fn statistic_from_entity(model: StatisticModel) -> Statistic {
    Statistic {
        id: model.id,
        title: model.title,
        value: model.value,
        icon: model.icon,
    }
}

fn value_from_entity(model: ValueModel) -> OurValue {
    OurValue {
        id: model.id,
        short_description: truncate_with_ellipsis(&model.description, SHORT_VALUE_LEN),
        title: model.title,
        description: model.description,
        image: model.image,
    }
}

fn faq_from_entity(model: FaqModel) -> Faq {
    Faq {
        id: model.id,
        short_question: truncate_with_ellipsis(&model.question, SHORT_FAQ_LEN),
        short_answer: truncate_with_ellipsis(&model.answer, SHORT_FAQ_LEN),
        question: model.question,
        answer: model.answer,
    }
}

fn partner_from_entity(model: PartnerModel) -> BusinessPartner {
    BusinessPartner {
        id: model.id,
        name: model.name,
        image: model.image,
        img_alt: model.img_alt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_exposes_embed_url() {
        let hero = hero_from_entity(HeroModel {
            id: Uuid::new_v4(),
            title: "Yeni Sezon".into(),
            description: String::new(),
            image: "hero/cover.jpg".into(),
            youtube_url: "https://youtu.be/dQw4w9WgXcQ".into(),
        });
        assert_eq!(
            hero.youtube_embed_url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn faq_short_fields_are_truncated() {
        let long = "a".repeat(100);
        let faq = faq_from_entity(FaqModel {
            id: Uuid::new_v4(),
            question: long.clone(),
            answer: "short".into(),
        });
        assert_eq!(faq.short_question.chars().count(), SHORT_FAQ_LEN + 1);
        assert!(faq.short_question.ends_with('…'));
        assert_eq!(faq.short_answer, "short");
        assert_eq!(faq.question, long);
    }

    #[test]
    fn value_short_description_is_truncated() {
        let value = value_from_entity(ValueModel {
            id: Uuid::new_v4(),
            title: "Kalite".into(),
            description: "b".repeat(61),
            image: "values/q.png".into(),
        });
        assert_eq!(value.short_description.chars().count(), SHORT_VALUE_LEN + 1);
    }
}
