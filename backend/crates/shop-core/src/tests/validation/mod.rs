mod body_validator;
