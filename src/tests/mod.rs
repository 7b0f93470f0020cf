mod test_data;
mod test_keywords;
