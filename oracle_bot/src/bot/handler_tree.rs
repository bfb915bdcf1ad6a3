use anyhow::Result;
use oracle_core::helpers::bot_commands::Command;
use teloxide::{
    dispatching::{DpHandlerDescription, HandlerExt, UpdateFilterExt},
    dptree::{self, Handler},
    types::{Me, Message, Update},
};

use crate::bot::{answers::answers, handler::handle_message, helpers::addressed_to_other_bot};

pub fn handler_tree() -> Handler<'static, Result<()>, DpHandlerDescription> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(dptree::entry().filter_command::<Command>().endpoint(answers))
            // Anything the command parser rejects still goes through the router,
            // which decides on its own whether the text is a price request.
            .branch(
                dptree::entry()
                    .filter(|msg: Message, me: Me| {
                        msg.text()
                            .is_some_and(|text| !addressed_to_other_bot(text, me.username()))
                    })
                    .endpoint(handle_message),
            ),
    )
}
