use derive_more::From;
use juniper::{EmptySubscription, FieldResult, GraphQLInputObject, GraphQLObject, RootNode, ID};

use crate::commands::crewmates_command;
use crate::crew_error::CrewError;
use crate::{entities, queries};

mod app_ctx;
pub use app_ctx::*;
mod common;
pub use common::*;

#[derive(Clone, Debug, From)]
struct Crewmate(entities::Crewmate);

#[juniper::graphql_object(Context = AppCtx)]
impl Crewmate {
    fn id(&self) -> ID {
        ID::new(self.0.id.as_str())
    }

    fn name(&self) -> &str {
        &self.0.name
    }

    fn speed(&self) -> i32 {
        self.0.speed
    }

    fn color(&self) -> &str {
        &self.0.color
    }

    fn category(&self) -> &str {
        &self.0.category
    }

    fn created_at(&self) -> String {
        self.0.created_at.to_rfc3339()
    }

    fn speed_label(&self) -> &str {
        self.0.speed_label().as_str()
    }

    fn role_description(&self) -> &str {
        self.0.role_description()
    }

    fn efficiency_rating(&self) -> i32 {
        self.0.efficiency_rating()
    }

    /// False when an out-of-band write left speed or color outside the category.
    fn satisfies_category_constraints(&self) -> bool {
        self.0.satisfies_category_constraints()
    }
}

#[derive(GraphQLObject, Clone, Debug)]
struct CategoryAttributes {
    category: String,
    description: String,
    min_speed: i32,
    max_speed: i32,
    colors: Vec<String>,
}

impl From<&entities::CategoryAttributes> for CategoryAttributes {
    fn from(attributes: &entities::CategoryAttributes) -> Self {
        Self {
            category: attributes.category().to_string(),
            description: attributes.category().description().to_string(),
            min_speed: attributes.min_speed().value(),
            max_speed: attributes.max_speed().value(),
            colors: attributes
                .colors()
                .iter()
                .map(|color| color.to_string())
                .collect(),
        }
    }
}

#[derive(GraphQLObject, Clone, Debug)]
struct ClampedAttributes {
    category: String,
    speed: i32,
    color: String,
}

#[derive(GraphQLInputObject, Clone, Debug)]
struct CrewmateInput {
    name: String,
    speed: i32,
    color: String,
    category: String,
}

fn user_error(err: impl std::error::Error + Send + Sync + 'static) -> anyhow::Error {
    GraphqlUserError::from(anyhow::Error::new(err)).into()
}

// same path as the form: pick the category first, then speed and color within it
fn draft_from_input(input: CrewmateInput) -> anyhow::Result<entities::CrewmateDraft> {
    let category = entities::Category::try_from(input.category.as_str()).map_err(user_error)?;
    let mut draft = entities::CrewmateDraft::default();
    draft.set_name(input.name);
    draft.select_category(category);
    draft
        .select_speed(input.speed)
        .map_err(|err| classify(CrewError::from(err)))?;
    draft
        .select_color(&input.color)
        .map_err(|err| classify(CrewError::from(err)))?;
    Ok(draft)
}

#[derive(Clone, Debug)]
pub struct QueryRoot;

#[juniper::graphql_object(Context = AppCtx, name = "Query")]
impl QueryRoot {
    /// Newest first.
    async fn crewmates(ctx: &AppCtx) -> FieldResult<Vec<Crewmate>> {
        handler(|| async {
            let view = queries::load_gallery(&mut ctx.repo())
                .await
                .map_err(classify)?;
            Ok(view.crewmates.into_iter().map(Crewmate::from).collect())
        })
        .await
    }

    async fn crewmate(ctx: &AppCtx, id: ID) -> FieldResult<Option<Crewmate>> {
        handler(|| async {
            let id = entities::CrewmateId::from(id.to_string());
            match queries::load_crewmate(&mut ctx.repo(), &id).await {
                Ok(crewmate) => Ok(Some(Crewmate::from(crewmate))),
                Err(CrewError::NotFound(_)) => Ok(None),
                Err(err) => Err(classify(err)),
            }
        })
        .await
    }

    fn categories() -> Vec<CategoryAttributes> {
        entities::Category::ALL
            .iter()
            .map(|category| CategoryAttributes::from(category.attributes()))
            .collect()
    }

    /// Unknown categories resolve to the Crewmate entry.
    fn category_attributes(category: String) -> CategoryAttributes {
        CategoryAttributes::from(entities::CategoryAttributes::lookup(&category))
    }

    /// Speed and color a draft ends up with after switching to `category`.
    async fn clamp_attributes(
        category: String,
        speed: i32,
        color: String,
    ) -> FieldResult<ClampedAttributes> {
        handler(|| async {
            let speed = entities::Speed::try_from(speed).map_err(user_error)?;
            let color = entities::Color::try_from(color.as_str()).map_err(user_error)?;
            let attributes = entities::CategoryAttributes::lookup(&category);
            let (speed, color) = attributes.clamp(speed, color);
            Ok(ClampedAttributes {
                category: attributes.category().to_string(),
                speed: speed.value(),
                color: color.to_string(),
            })
        })
        .await
    }
}

#[derive(Clone, Debug)]
pub struct MutationRoot;

#[juniper::graphql_object(Context = AppCtx, name = "Mutation")]
impl MutationRoot {
    async fn create_crewmate(ctx: &AppCtx, input: CrewmateInput) -> FieldResult<Crewmate> {
        handler(|| async {
            let draft = draft_from_input(input)?;
            let crewmate = crewmates_command::create(&mut ctx.repo(), &draft)
                .await
                .map_err(classify)?;
            Ok(Crewmate::from(crewmate))
        })
        .await
    }

    async fn update_crewmate(
        ctx: &AppCtx,
        id: ID,
        input: CrewmateInput,
    ) -> FieldResult<Crewmate> {
        handler(|| async {
            let id = entities::CrewmateId::from(id.to_string());
            let draft = draft_from_input(input)?;
            let crewmate = crewmates_command::update(&mut ctx.repo(), &id, &draft)
                .await
                .map_err(classify)?;
            Ok(Crewmate::from(crewmate))
        })
        .await
    }

    /// Returns the id; deleting a missing id succeeds.
    async fn delete_crewmate(ctx: &AppCtx, id: ID) -> FieldResult<ID> {
        handler(|| async {
            let crewmate_id = entities::CrewmateId::from(id.to_string());
            crewmates_command::delete(&mut ctx.repo(), &crewmate_id)
                .await
                .map_err(classify)?;
            Ok(id)
        })
        .await
    }
}

pub type Schema = RootNode<'static, QueryRoot, MutationRoot, EmptySubscription<AppCtx>>;

pub fn create_schema() -> Schema {
    Schema::new(QueryRoot {}, MutationRoot {}, EmptySubscription::<AppCtx>::new())
}
