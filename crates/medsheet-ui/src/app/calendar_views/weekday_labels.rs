fn weekday_labels()
-> [&'static str; 7] {
  // The grid offset is Monday-based,
  // so the label row is too.
  [
    "Mon", "Tue", "Wed", "Thu",
    "Fri", "Sat", "Sun",
  ]
}
