use crate::*;
use rps_gesture::Move;

/// Plays one round: draws the computer's move from `chance` and scores it
/// against `player`.
///
/// The caller must only resolve classified moves; `Unknown` fails with
/// [`ResolveError::InvalidArgument`] before anything is drawn.
pub fn resolve<C>(player: Move, chance: &mut C) -> Result<Showdown, ResolveError>
where
    C: Chance + ?Sized,
{
    if !player.is_known() {
        return Err(ResolveError::InvalidArgument(player));
    }
    let computer = chance.draw()?;
    let showdown = Showdown::try_from((player, computer))?;
    log::info!("player played {}", showdown.player());
    log::info!("computer played {}", showdown.computer());
    Ok(showdown)
}
