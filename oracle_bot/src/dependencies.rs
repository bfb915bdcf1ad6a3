use oracle_core::router::handler::CommandRouter;

#[derive(Clone)]
pub struct BotDependencies {
    pub router: CommandRouter,
}
