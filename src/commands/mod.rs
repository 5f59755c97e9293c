mod about;
mod avatar;
mod buy;
mod catch;
mod help;
mod inventory;
mod invite;
mod leaderboard;
mod ping;
mod profile;
mod setup;
mod shop;
mod shutdown;
mod stats;

use crate::{Data, Error};

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        setup::setup(),
        catch::catch(),
        profile::profile(),
        shop::shop(),
        buy::buy(),
        inventory::inventory(),
        leaderboard::leaderboard(),
        stats::stats(),
        about::about(),
        ping::ping(),
        invite::invite(),
        help::help(),
        avatar::avatar(),
        shutdown::shutdown(),
    ]
}
