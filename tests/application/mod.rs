mod intake_validator_test;
mod summarization_service_test;
