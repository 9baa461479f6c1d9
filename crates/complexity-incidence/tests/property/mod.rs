mod builder_properties;
