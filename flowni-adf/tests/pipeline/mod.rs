mod fixtures;
mod properties;
mod snapshots;
