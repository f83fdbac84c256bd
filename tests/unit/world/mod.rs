mod events;
mod object;
