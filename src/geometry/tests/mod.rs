mod rectangle;
