mod hit;
mod playing_tracker;
mod profile;
